mod prim;

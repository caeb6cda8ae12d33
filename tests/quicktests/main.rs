mod heap;
mod tree;

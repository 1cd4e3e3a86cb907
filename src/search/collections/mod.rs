pub mod search_tree;

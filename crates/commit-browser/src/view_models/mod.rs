pub mod commit_list;

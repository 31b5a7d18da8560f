pub mod create_reply;

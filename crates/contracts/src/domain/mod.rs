pub mod a001_board;
pub mod a002_program;
pub mod a003_course;
pub mod a004_subject;
pub mod a005_chapter;
pub mod a006_topic;
pub mod a007_question;
pub mod a008_book_reference;
pub mod common;

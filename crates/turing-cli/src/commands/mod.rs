pub mod grade;
pub mod init;
pub mod rubrics;
pub mod validate;

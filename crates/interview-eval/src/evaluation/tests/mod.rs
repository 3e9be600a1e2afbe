mod common;
mod grading;
mod star;

mod common;
mod factors;
mod outlook;

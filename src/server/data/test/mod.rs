mod event;
mod group;
mod student;
mod user;

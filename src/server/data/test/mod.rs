mod catalog;
mod favorite;
mod user;

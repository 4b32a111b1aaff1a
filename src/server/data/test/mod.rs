mod tag;
mod user;

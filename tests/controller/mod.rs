mod attendance;
mod member;
mod org;
mod user;

mod activity;
mod analysis;
mod document;
mod user;

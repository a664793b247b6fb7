mod client;
mod editor;

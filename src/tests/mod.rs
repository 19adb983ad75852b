mod app;
mod form;
mod presentation;

mod forms;
mod models;
mod seed;

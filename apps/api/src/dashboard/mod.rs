// Dashboard: a server-rendered page listing saved posts, plus the JSON
// listing it polls after triggering generation.

pub mod handlers;
pub mod render;

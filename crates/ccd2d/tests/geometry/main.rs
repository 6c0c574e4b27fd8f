#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod ball_ball_toi;
mod custom_distance_query;
mod separation_function;

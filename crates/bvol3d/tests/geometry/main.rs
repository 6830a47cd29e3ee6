extern crate nalgebra as na;

mod bounding_frustum;
mod bounding_sphere;
mod dispatch;
mod fitting;
mod oriented_bounding_box;
mod pick;

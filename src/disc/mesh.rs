pub mod structured2d;

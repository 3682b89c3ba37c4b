pub mod shot;

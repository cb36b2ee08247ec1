pub mod step_ring;

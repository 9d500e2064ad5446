pub mod blocking_queue;

pub mod scaffolding_rest_controller;

/// Integration test entry point
mod tracker_workflow;

mod common;
mod test_progression_flow;

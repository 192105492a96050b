mod basic;
mod edge_cases;

#![cfg(feature = "serde")]

use bees::{Bounds, Solution, Vector};
use bees::objective::PopulationVariance;

#[test]
fn test_vector_round_trips_through_json() {
    let vector = Vector::new(vec![1.5, 2.5, 3.5], &Bounds::default());

    let json = serde_json::to_string(&vector).unwrap();
    let back: Vector = serde_json::from_str(&json).unwrap();

    assert_eq!(back, vector);
}

#[test]
fn test_solution_round_trips_through_json() {
    let vector = Vector::new(vec![4.0; 5], &Bounds::default());
    let solution = Solution::from_vector(vector, &PopulationVariance, 10).unwrap();

    let json = serde_json::to_string(&solution).unwrap();
    let back: Solution = serde_json::from_str(&json).unwrap();

    assert_eq!(back, solution);
}

#[test]
fn test_bounds_round_trips_through_json() {
    let bounds = Bounds::new(-5.0, 5.0);

    let json = serde_json::to_string(&bounds).unwrap();
    let back: Bounds = serde_json::from_str(&json).unwrap();

    assert_eq!(back, bounds);
}

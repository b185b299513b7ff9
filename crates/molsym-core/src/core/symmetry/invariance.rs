use crate::core::models::atom::Atom;
use crate::core::utils::geometry::nearest_distance;
use nalgebra::Point3;
use std::cmp::Ordering;

/// Returns `true` if every transformed position coincides with some original
/// position within `tolerance` (Euclidean distance).
///
/// Configurations of different length are never invariant. A negative or NaN
/// tolerance matches nothing.
pub fn is_invariant(original: &[Point3<f64>], transformed: &[Point3<f64>], tolerance: f64) -> bool {
    if original.len() != transformed.len() {
        return false;
    }
    transformed
        .iter()
        .all(|p| original.iter().any(|q| (p - q).norm() <= tolerance))
}

/// The largest distance from a transformed position to its nearest original
/// position. `None` when either configuration is empty.
pub fn max_deviation(original: &[Point3<f64>], transformed: &[Point3<f64>]) -> Option<f64> {
    if original.is_empty() || transformed.is_empty() {
        return None;
    }
    transformed
        .iter()
        .filter_map(|p| nearest_distance(p, original))
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
}

/// Finds the permutation induced by an operation on a molecule's atoms.
///
/// Entry `i` of the result is the index of the original atom that the image
/// of atom `i` lands on. Each original atom is claimed at most once and only
/// by an image of the same element. Returns `None` if no such one-to-one
/// mapping exists within `tolerance`.
///
/// Images and atoms are matched as a bipartite graph with augmenting paths,
/// so an image never blocks a later one that has no other atom in reach.
/// Among equally valid mappings, nearer atoms are tried first.
pub fn find_atom_mapping(
    atoms: &[Atom],
    transformed: &[Point3<f64>],
    tolerance: f64,
) -> Option<Vec<usize>> {
    if atoms.len() != transformed.len() {
        return None;
    }
    let candidates: Vec<Vec<usize>> = transformed
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let mut reachable: Vec<(usize, f64)> = atoms
                .iter()
                .enumerate()
                .filter(|(_, candidate)| candidate.same_element(&atoms[i]))
                .map(|(j, candidate)| (j, (image - candidate.position).norm()))
                .filter(|(_, dist)| *dist <= tolerance)
                .collect();
            reachable.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
            reachable.into_iter().map(|(j, _)| j).collect()
        })
        .collect();

    let mut owner: Vec<Option<usize>> = vec![None; atoms.len()];
    for image in 0..transformed.len() {
        let mut visited = vec![false; atoms.len()];
        if !augment(image, &candidates, &mut owner, &mut visited) {
            return None;
        }
    }

    let mut mapping = vec![0; transformed.len()];
    for (atom, image) in owner.iter().enumerate() {
        mapping[(*image)?] = atom;
    }
    Some(mapping)
}

fn augment(
    image: usize,
    candidates: &[Vec<usize>],
    owner: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for &atom in &candidates[image] {
        if visited[atom] {
            continue;
        }
        visited[atom] = true;
        let free = match owner[atom] {
            None => true,
            Some(other) => augment(other, candidates, owner, visited),
        };
        if free {
            owner[atom] = Some(image);
            return true;
        }
    }
    false
}

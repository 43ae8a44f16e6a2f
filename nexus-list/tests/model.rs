//! Randomized operation sequences checked against a `Vec` model.

use nexus_list::{Cursor, ListError, OwnedList};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const OPS: usize = 5_000;

/// Cursor to the element at `index` (`end()` when `index == len`).
fn cursor_at(list: &OwnedList<u16>, index: usize) -> Cursor {
    let mut it = list.begin();
    for _ in 0..index {
        list.move_next(&mut it).unwrap();
    }
    it
}

fn check(list: &OwnedList<u16>, model: &[u16]) {
    assert_eq!(list.len(), model.len());
    assert!(list.iter().eq(model.iter()));
    assert!(list.iter().rev().eq(model.iter().rev()));
    assert_eq!(list.front().ok(), model.first());
    assert_eq!(list.back().ok(), model.last());
}

fn run(seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut list = OwnedList::new();
    let mut model: Vec<u16> = Vec::new();

    for _ in 0..OPS {
        match rng.random_range(0..12) {
            0 | 1 => {
                let v = rng.random_range(0..32);
                list.push_back(v);
                model.push(v);
            }
            2 => {
                let v = rng.random_range(0..32);
                list.push_front(v);
                model.insert(0, v);
            }
            3 => {
                let index = rng.random_range(0..=model.len());
                let v = rng.random_range(0..32);
                let it = list.insert(cursor_at(&list, index), v).unwrap();
                model.insert(index, v);
                assert_eq!(list.get(it), Ok(&v));
            }
            4 => {
                if model.is_empty() {
                    assert_eq!(list.erase(list.begin()), Err(ListError::EmptyContainer));
                    continue;
                }
                let index = rng.random_range(0..model.len());
                let next = list.erase(cursor_at(&list, index)).unwrap();
                model.remove(index);
                assert_eq!(list.get(next).ok(), model.get(index));
            }
            5 => assert_eq!(list.pop_front().ok(), (!model.is_empty()).then(|| model.remove(0))),
            6 => assert_eq!(list.pop_back().ok(), model.pop()),
            7 => {
                list.sort();
                model.sort();
            }
            8 => {
                list.reverse();
                model.reverse();
            }
            9 => {
                list.unique();
                model.dedup();
            }
            10 => {
                let mut other: OwnedList<u16> = (0..rng.random_range(0..8))
                    .map(|_| rng.random_range(0..32))
                    .collect();
                let mut incoming: Vec<u16> = other.iter().copied().collect();

                list.sort();
                model.sort();
                other.sort();
                incoming.sort();

                list.merge(&mut other);
                model.extend(incoming);
                model.sort();
                assert!(other.is_empty());
            }
            _ => {
                if model.len() > 200 {
                    list.clear();
                    model.clear();
                }
            }
        }
        check(&list, &model);
    }
}

#[test]
fn model_seed_1() {
    run(1);
}

#[test]
fn model_seed_2() {
    run(0xdead_beef);
}

#[test]
fn model_seed_3() {
    run(0x5eed_1234_5678);
}

#[test]
fn clone_tracks_model() {
    let mut rng = SmallRng::seed_from_u64(7);
    let model: Vec<u16> = (0..300).map(|_| rng.random_range(0..1000)).collect();
    let list: OwnedList<u16> = model.iter().copied().collect();

    let mut copy = list.clone();
    check(&copy, &model);

    copy.sort();
    let mut sorted = model.clone();
    sorted.sort();
    check(&copy, &sorted);
    check(&list, &model);
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn uuid_gen_creates_unique_tokens() {
    let id_gen = UuidIdGen;
    let id1 = id_gen.next();
    let id2 = id_gen.next();
    assert_ne!(id1, id2);
    assert_eq!(id1.len(), 32);
    assert!(id1.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn sequential_gen_creates_predictable_tokens() {
    let id_gen = SequentialIdGen::new("tmp");
    assert_eq!(id_gen.next(), "tmp-1");
    assert_eq!(id_gen.next(), "tmp-2");
    assert_eq!(id_gen.next(), "tmp-3");
}

#[test]
fn sequential_clones_never_repeat_a_token() {
    let a = SequentialIdGen::new("tmp");
    let b = a.clone();
    let tokens = [a.next(), b.next(), a.next()];
    assert_eq!(tokens, ["tmp-1", "tmp-2", "tmp-3"]);
}

#[test]
fn default_sequential_prefix() {
    assert_eq!(SequentialIdGen::default().next(), "id-1");
}

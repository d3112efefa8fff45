// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    unset = { None },
    empty = { Some("") },
    blank = { Some("   ") },
)]
fn falls_back_to_parent_directory(env_value: Option<&str>) {
    let config = StoreConfig::resolve(env_value, Path::new("/srv/app/backend"));
    assert_eq!(config.path, PathBuf::from("/srv/app/db.json"));
}

#[test]
fn absolute_override_is_used_verbatim() {
    let config = StoreConfig::resolve(Some("/data/sensors.json"), Path::new("/srv/app/backend"));
    assert_eq!(config.path, PathBuf::from("/data/sensors.json"));
}

#[test]
fn relative_override_is_taken_from_cwd() {
    let config = StoreConfig::resolve(Some(" fixtures/db.json "), Path::new("/srv/app/backend"));
    assert_eq!(config.path, PathBuf::from("/srv/app/backend/fixtures/db.json"));
}

#[test]
fn root_cwd_keeps_default_in_root() {
    let config = StoreConfig::resolve(None, Path::new("/"));
    assert_eq!(config.path, PathBuf::from("/db.json"));
}


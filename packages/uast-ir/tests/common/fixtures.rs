//! Test fixtures
//!
//! Paths to on-disk CST exports and small source snippets per language.

use std::path::PathBuf;

/// Directory holding JSON fixtures
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Go-like program: function `hello` (params, body with return) and class `Example`
pub fn example_cst_path() -> PathBuf {
    fixtures_dir().join("example.json")
}

pub const PYTHON_SOURCE: &str = r#"import os

class Greeter:
    def greet(self, name):
        if name:
            return "hello " + name
        return None

def main():
    for i in range(3):
        print(Greeter().greet(str(i)))
"#;

pub const RUST_SOURCE: &str = r#"fn add(a: i32, b: i32) -> i32 {
    a + b
}

struct Point {
    x: i32,
}
"#;

pub const GO_SOURCE: &str = r#"package main

import "fmt"

func main() {
	fmt.Println("hi")
}
"#;

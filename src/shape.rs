//! Structural parity between catalog branches.
//!
//! Two branches are in parity when every key path present in one is present in
//! the other with the same kind of value: string for string, number for number,
//! a list of the same length, a record with the same field names. Identifier
//! fields must also agree by value, since views pair entries with icons and
//! images through them.
use std::collections::BTreeMap;

use serde_json::Value;

/// Fields whose values pair catalog entries with presentation metadata.
pub const IDENTITY_FIELDS: &[&str] = &["id", "statusKey"];

/// Type skeleton of a JSON value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Null,
    Bool,
    Number,
    String,
    List(Vec<Shape>),
    Record(BTreeMap<String, Shape>),
}

impl Shape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Shape::Null,
            Value::Bool(_) => Shape::Bool,
            Value::Number(_) => Shape::Number,
            Value::String(_) => Shape::String,
            Value::Array(items) => Shape::List(items.iter().map(Shape::of).collect()),
            Value::Object(fields) => {
                Shape::Record(fields.iter().map(|(k, v)| (k.clone(), Shape::of(v))).collect())
            }
        }
    }

    /// One-level summary used in mismatch reports.
    pub fn describe(&self) -> String {
        match self {
            Shape::Null => "null".into(),
            Shape::Bool => "bool".into(),
            Shape::Number => "number".into(),
            Shape::String => "string".into(),
            Shape::List(items) => format!("list of {}", items.len()),
            Shape::Record(fields) => {
                let names: Vec<&str> = fields.keys().map(String::as_str).collect();
                format!("record {{{}}}", names.join(", "))
            }
        }
    }
}

/// A single divergence between a reference branch and another branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub path: String,
    pub expected: String,
    pub found: String,
}

/// Collect every divergence of `other` from `reference`, in document order.
pub fn parity(reference: &Value, other: &Value) -> Vec<Mismatch> {
    let mut out = Vec::new();
    walk("", reference, other, &mut out);
    out
}

fn walk(path: &str, reference: &Value, other: &Value, out: &mut Vec<Mismatch>) {
    match (reference, other) {
        (Value::Object(a), Value::Object(b)) => {
            for (key, av) in a {
                let child = join(path, key);
                match b.get(key) {
                    Some(bv) => {
                        if IDENTITY_FIELDS.contains(&key.as_str()) && av != bv {
                            out.push(Mismatch { path: child, expected: av.to_string(), found: bv.to_string() });
                        } else {
                            walk(&child, av, bv, out);
                        }
                    }
                    None => out.push(Mismatch {
                        path: child,
                        expected: Shape::of(av).describe(),
                        found: "missing".into(),
                    }),
                }
            }
            for (key, bv) in b {
                if !a.contains_key(key) {
                    out.push(Mismatch {
                        path: join(path, key),
                        expected: "missing".into(),
                        found: Shape::of(bv).describe(),
                    });
                }
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            if a.len() != b.len() {
                out.push(Mismatch {
                    path: display(path),
                    expected: format!("list of {}", a.len()),
                    found: format!("list of {}", b.len()),
                });
                return;
            }
            for (i, (av, bv)) in a.iter().zip(b).enumerate() {
                walk(&format!("{path}[{i}]"), av, bv, out);
            }
        }
        (a, b) => {
            let (sa, sb) = (Shape::of(a), Shape::of(b));
            if sa != sb {
                out.push(Mismatch { path: display(path), expected: sa.describe(), found: sb.describe() });
            }
        }
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() { key.to_string() } else { format!("{path}.{key}") }
}

fn display(path: &str) -> String {
    if path.is_empty() { "<root>".into() } else { path.to_string() }
}

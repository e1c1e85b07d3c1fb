//! End-to-end tests: real reqwest transport against a local mock gateway.
#![cfg(test)]

mod support;

mod health;
mod refresh;

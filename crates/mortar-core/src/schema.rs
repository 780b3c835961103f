//! Model descriptors and their normalized table form.
//!
//! [`app`] holds the descriptors as the framework declares them: loosely
//! typed column types, optional flags, raw defaults. [`db`] holds what
//! normalization produces: a closed set of column types with canonical
//! constraints that the SQL serializer can emit without further inference.

pub mod app;

pub mod db;

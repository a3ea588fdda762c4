//! End-to-end mapping scenarios against fixture topologies.

#[cfg(test)]
mod mapping;

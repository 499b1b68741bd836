// Add-book form core: declarative field descriptors, cascading selection
// state, and the transactional save path. The front end renders whatever
// describe_form reports; no widget logic lives on this side.

pub mod cascade;
pub mod fields;
pub mod save;
pub mod state;

#[cfg(test)]
mod tests;

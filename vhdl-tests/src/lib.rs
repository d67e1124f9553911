/// Emits an entity and snapshots the produced VHDL. The snapshot is stored
/// inline, so the expected code sits right next to the construction.
#[cfg(test)]
macro_rules! snapshot_entity {
    ($entity:expr, @$snapshot:literal) => {{
        $crate::init_logging();
        let entity: &vhdl_ast::Entity = &$entity;
        let first = entity.to_string();
        // Emission must not depend on anything but the tree
        assert_eq!(first, entity.to_string(), "Emission is not deterministic");
        insta::assert_snapshot!(first, @$snapshot);
    }};
}

#[cfg(test)]
mod scenarios;

/// Installs a subscriber printing the trace output of the emitter, filtered by
/// `RUST_LOG`. Safe to call from several tests.
#[cfg(test)]
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

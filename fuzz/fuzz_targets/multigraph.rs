#![no_main]

use libfuzzer_sys::fuzz_target;

use reticula::{
    graph::MultiGraph,
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
};

fuzz_target!(|ops: MutOpsSeq| {
    let mut graph = MultiGraph::new();

    for op in ops {
        let _ = op.apply(&mut graph);
        check_consistency(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});

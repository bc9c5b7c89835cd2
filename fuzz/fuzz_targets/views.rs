#![no_main]

use libfuzzer_sys::fuzz_target;

use reticula::{
    adapt::Reverse,
    core::GraphRef,
    graph::MultiDiGraph,
    infra::{arbitrary::MutOpsSeq, testing::check_consistency},
};

fuzz_target!(|ops: MutOpsSeq| {
    let mut reversed = Reverse::new(MultiDiGraph::new());

    for op in ops {
        let _ = op.apply(reversed.get_mut());

        check_consistency(&reversed)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();

        let graph = reversed.get_ref();
        let lower = graph.subgraph(0..128);
        check_consistency(&lower)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();

        assert_eq!(reversed.number_of_edges(), graph.number_of_edges());
        assert_eq!(
            graph.to_directed_view().number_of_edges(),
            graph.number_of_edges()
        );
    }
});

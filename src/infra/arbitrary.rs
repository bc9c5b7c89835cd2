use std::fmt;

use arbitrary::Arbitrary;

use crate::{
    attrs,
    core::{
        marker::{EdgeType, Multiplicity},
        EdgeSpec, GraphError, GraphMut, Key,
    },
    graph::GraphCore,
};

/// A single structural mutation on a graph with `u8` nodes.
#[derive(Debug, Arbitrary, Clone, PartialEq)]
pub enum MutOp {
    AddNode(u8),
    RemoveNode(u8),
    AddEdge(u8, u8),
    AddWeightedEdge(u8, u8, i64),
    AddKeyedEdge(u8, u8, u8),
    RemoveEdge(u8, u8),
    RemoveKeyedEdge(u8, u8, u8),
    RemoveNodes(Vec<u8>),
    Clear,
    ClearEdges,
}

impl MutOp {
    /// Applies the operation. Failures are the regular errors of the
    /// operation, such as removing a missing edge or using a key in a simple
    /// graph.
    pub fn apply<Ty, M>(self, graph: &mut GraphCore<u8, Ty, M>) -> Result<(), GraphError>
    where
        Ty: EdgeType,
        M: Multiplicity,
    {
        match self {
            MutOp::AddNode(n) => graph.try_add_node(n, attrs! {}),
            MutOp::RemoveNode(n) => graph.try_remove_node(&n),
            MutOp::AddEdge(u, v) => graph.try_add_edge((u, v)).map(drop),
            MutOp::AddWeightedEdge(u, v, weight) => graph
                .try_add_edge((u, v, attrs! { "weight" => weight }))
                .map(drop),
            MutOp::AddKeyedEdge(u, v, key) => graph
                .try_add_edge(EdgeSpec::new(u, v).with_key(key as usize))
                .map(drop),
            MutOp::RemoveEdge(u, v) => graph.try_remove_edge(&u, &v, None),
            MutOp::RemoveKeyedEdge(u, v, key) => {
                graph.try_remove_edge(&u, &v, Some(&Key::Index(key as usize)))
            }
            MutOp::RemoveNodes(nodes) => {
                graph.remove_nodes_from(nodes);
                Ok(())
            }
            MutOp::Clear => graph.try_clear(),
            MutOp::ClearEdges => {
                graph.clear_edges();
                Ok(())
            }
        }
    }
}

#[derive(Arbitrary)]
pub struct MutOpsSeq(pub Vec<MutOp>);

impl IntoIterator for MutOpsSeq {
    type Item = MutOp;
    type IntoIter = std::vec::IntoIter<MutOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl MutOpsSeq {
    /// Applies all operations while printing them as code, for turning a
    /// fuzzer finding into a test.
    pub fn replay<Ty, M>(self, graph: &mut GraphCore<u8, Ty, M>)
    where
        Ty: EdgeType,
        M: Multiplicity,
    {
        println!("let mut graph = {}::new();", GraphCore::<u8, Ty, M>::variant_name());
        println!();

        for op in self {
            match &op {
                MutOp::AddNode(n) => println!("graph.add_node({n});"),
                MutOp::RemoveNode(n) => println!("graph.remove_node(&{n});"),
                MutOp::AddEdge(u, v) => println!("graph.add_edge({u}, {v});"),
                MutOp::AddWeightedEdge(u, v, weight) => {
                    println!("graph.add_edge_with({u}, {v}, attrs! {{ \"weight\" => {weight} }});")
                }
                MutOp::AddKeyedEdge(u, v, key) => {
                    println!("graph.try_add_edge(EdgeSpec::new({u}, {v}).with_key({key}usize));")
                }
                MutOp::RemoveEdge(u, v) => println!("graph.try_remove_edge(&{u}, &{v}, None);"),
                MutOp::RemoveKeyedEdge(u, v, key) => {
                    println!("graph.try_remove_edge(&{u}, &{v}, Some(&Key::Index({key})));")
                }
                MutOp::RemoveNodes(nodes) => println!("graph.remove_nodes_from({nodes:?});"),
                MutOp::Clear => println!("graph.clear();"),
                MutOp::ClearEdges => println!("graph.clear_edges();"),
            }

            let _ = op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl fmt::Debug for MutOpsSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")
    }
}

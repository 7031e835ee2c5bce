use quadterrain::{core::is_power_of_2, prelude::*};

use std::fs;

/// Loads a square RAW heightmap of little-endian 16-bit samples (the common `.r16` format) and reports how compactly
/// the quadtree represents it.
fn main() {
    let args: Vec<_> = std::env::args().collect();
    let raw_path = &args[1];

    println!("Loading {}", raw_path);

    let bytes = fs::read(raw_path).unwrap();
    let values: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    let edge_length = (values.len() as f64).sqrt() as i32;
    assert_eq!(
        (edge_length * edge_length) as usize,
        values.len(),
        "{} samples do not form a square",
        values.len()
    );
    assert!(
        is_power_of_2(edge_length),
        "edge length {} is not a power of two",
        edge_length
    );

    let footprint = Quadrant::new(Point2i::ZERO, edge_length);
    let map = Heightmap::from_vec(footprint.extent(), values);

    let mut terrain = QuadTerrain::new(QuadTerrainConfig {
        max_subdivisions: footprint.exponent(),
        initial_height: 0,
    });
    terrain.from_heightmap(&map);
    terrain.cleanup();

    measure_node_count(terrain.tree(), &map);
}

fn measure_node_count(tree: &QuadTree, map: &Heightmap) {
    let mut leaves = 0;
    let mut single_cells = 0;
    let mut max_depth = 0;
    tree.visit(tree.root(), &mut |id: NodeId, node: &QuadNode| {
        if node.is_leaf() {
            leaves += 1;
            if node.size() == 1 {
                single_cells += 1;
            }
        }
        max_depth = max_depth.max(tree.depth(id));
        VisitStatus::Continue
    });

    let source_size_bytes = map.as_bytes().len();
    let tree_size_bytes = tree.num_nodes() * std::mem::size_of::<QuadNode>();

    println!(
        "nodes = {}, leaves = {}, single cells = {}, max depth = {}",
        tree.num_nodes(),
        leaves,
        single_cells,
        max_depth
    );
    println!(
        "source = {} bytes, tree = {} bytes; rate = {:.1}%\n",
        source_size_bytes,
        tree_size_bytes,
        100.0 * (tree_size_bytes as f32 / source_size_bytes as f32)
    );
}

#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]
#![allow(warnings)]

use plotters::prelude::*;
use primehash::{BuiltinHash, ChainingMap, LinkedList, OpenAddressingMap};
use rand::Rng;

// Prime, so neither map rounds it up
const TABLE_SIZE: usize = 10_007;
// Key counts from 10% to 100% of TABLE_SIZE
const NUM_STEPS: usize = 10;
const KEY_LENGTH: usize = 8;

const SERIES: [&str; 4] = [
    "Chaining / additive",
    "Chaining / positional",
    "Open addressing / additive",
    "Open addressing / positional",
];

fn random_key(rng: &mut impl Rng) -> String {
    (0..KEY_LENGTH).map(|_| char::from(rng.random_range(b'a'..=b'z'))).collect()
}

fn longest_chain(map: &ChainingMap<usize>) -> usize {
    (0..map.capacity())
        .filter_map(|index| map.get_list(index).ok())
        .map(LinkedList::length)
        .max()
        .unwrap_or(0)
}

struct ChainingSample {
    empty_ratio: f64,
    longest_chain: usize,
}

struct ProbingSample {
    empty_ratio: f64,
    capacity: usize,
}

fn sample_chaining(keys: &[String], hash: BuiltinHash) -> ChainingSample {
    let mut map = ChainingMap::with_capacity_and_hasher(TABLE_SIZE, hash.function());
    for (value, key) in keys.iter().enumerate() {
        map.put(key.as_str(), value);
    }
    ChainingSample {
        empty_ratio: map.empty_buckets() as f64 / map.capacity() as f64,
        longest_chain: longest_chain(&map),
    }
}

fn sample_open_addressing(keys: &[String], hash: BuiltinHash) -> ProbingSample {
    let mut map = OpenAddressingMap::with_capacity_and_hasher(TABLE_SIZE, hash.function());
    for (value, key) in keys.iter().enumerate() {
        map.put(key.as_str(), value);
    }
    ProbingSample {
        empty_ratio: map.empty_buckets() as f64 / map.capacity() as f64,
        capacity: map.capacity(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let num_keys: Vec<usize> = (1..=NUM_STEPS).map(|step| TABLE_SIZE * step / NUM_STEPS).collect();
    println!("Number of keys: {:?}", num_keys);

    // Generate random keys once so every map sees the same input
    let mut rng = rand::rng();
    let max_keys_needed = num_keys.iter().copied().max().unwrap_or(0);
    let keys: Vec<String> = (0..max_keys_needed).map(|_| random_key(&mut rng)).collect();

    let mut empty_ratio: Vec<Vec<f64>> = vec![Vec::new(); SERIES.len()];
    let mut longest: Vec<Vec<usize>> = vec![Vec::new(); BuiltinHash::ALL.len()];

    for &n_keys in &num_keys {
        println!("Testing with {} keys", n_keys);
        let slice = &keys[..n_keys];

        for (hash_idx, &hash) in BuiltinHash::ALL.iter().enumerate() {
            let chained = sample_chaining(slice, hash);
            let probed = sample_open_addressing(slice, hash);

            empty_ratio[hash_idx].push(chained.empty_ratio);
            empty_ratio[hash_idx + 2].push(probed.empty_ratio);
            longest[hash_idx].push(chained.longest_chain);

            println!(
                "  {}: chaining empty = {:.3}, longest chain = {}; open addressing empty = {:.3}, capacity = {}",
                hash, chained.empty_ratio, chained.longest_chain, probed.empty_ratio, probed.capacity
            );
        }
    }

    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50),  // Bright red
        RGBColor(50, 90, 220),  // Bright blue
        RGBColor(50, 180, 50),  // Bright green
        RGBColor(180, 50, 180), // Bright magenta
    ];
    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;
    let x_labels: Vec<String> = num_keys.iter().map(|&n| n.to_string()).collect();

    // Plot 1: share of empty buckets
    let root = BitMapBackend::new("empty_buckets.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Empty Buckets by Strategy and Hash Function", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..num_keys.len(), 0.0..1.0)?;

    chart
        .configure_mesh()
        .x_labels(num_keys.len())
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Inserted")
        .y_desc("Empty Buckets / Capacity")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (series_idx, &series) in SERIES.iter().enumerate() {
        let color = &colors[series_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..num_keys.len()).map(|i| (i, empty_ratio[series_idx][i])),
                line_style,
            ))?
            .label(series)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..num_keys.len()).map(|i| {
            Circle::new((i, empty_ratio[series_idx][i]), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    // Plot 2: longest chain per hash function
    let root = BitMapBackend::new("longest_chain.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_chain = longest.iter().flat_map(|v| v.iter()).copied().max().unwrap_or(1) as f64 * 1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Longest Chain at Fixed Capacity", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..num_keys.len(), 0.0..max_chain)?;

    chart
        .configure_mesh()
        .x_labels(num_keys.len())
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Inserted")
        .y_desc("Longest Chain")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (hash_idx, &hash) in BuiltinHash::ALL.iter().enumerate() {
        let color = &colors[hash_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..num_keys.len()).map(|i| (i, longest[hash_idx][i] as f64)),
                line_style,
            ))?
            .label(hash.to_string())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..num_keys.len()).map(|i| {
            Circle::new((i, longest[hash_idx][i] as f64), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    println!("Generated plot images: empty_buckets.png, longest_chain.png");

    Ok(())
}

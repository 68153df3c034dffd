// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use metal_watch::core::html::Document;
use metal_watch::data::MetricKey;
use metal_watch::specs::rates::{self, Extraction};

/// A page shaped like the live one: navigation noise, then a heading and
/// table per carat, then a long city table.
fn sample_page() -> String {
    let mut html = String::from("<html><body><nav>");
    for i in 0..50 {
        html.push_str(&format!("<h4>Menu {i}</h4><ul><li>City {i}</li></ul>"));
    }
    html.push_str("</nav>");
    for (carat, price) in [("24", "7,000"), ("22", "6,500")] {
        html.push_str(&format!(
            "<h2>Today {carat} Carat Gold Rate Per Gram</h2><table>\
             <tr><th>Gram</th><th>Today</th></tr>\
             <tr><td>1</td><td>₹{price}</td></tr>\
             <tr><td>8</td><td>₹56,000</td></tr></table>"
        ));
    }
    html.push_str("<table>");
    for i in 0..200 {
        html.push_str(&format!("<tr><td>City {i}</td><td>₹7,{i:03}</td><td>₹6,{i:03}</td></tr>"));
    }
    html.push_str("</table></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let page = sample_page();

    c.bench_function("parse_document", |b| {
        b.iter(|| Document::parse(black_box(&page)))
    });

    let doc = Document::parse(&page);
    let label = rates::label(MetricKey::Gold22K);

    c.bench_function("header_anchored_22k", |b| {
        b.iter(|| rates::header_anchored(black_box(&doc), black_box(label)))
    });

    c.bench_function("flat_row_scan_22k", |b| {
        b.iter(|| rates::flat_row_scan(black_box(&doc), black_box(label)))
    });

    c.bench_function("extract_all_gold", |b| {
        let keys = [MetricKey::Gold24K, MetricKey::Gold22K];
        b.iter(|| Extraction::default().extract_all(black_box(&doc), &keys))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);

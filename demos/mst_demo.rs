//! SpanGraph 演示
//!
//! 构造示例图，分别用 Prim 和 Kruskal 求最小生成树并逐步打印

use clap::{Parser, ValueEnum};
use prettytable::{format, row, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;
use spangraph::generate::{random_connected, simple_example};
use spangraph::{CycleCheck, Graph, Kruskal, MstConfig, MstStep, Prim, SpanningTree, VertexId};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Example {
    /// 7 个顶点、10 条边的示例图
    Simple,
    /// 随机连通图
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "mst_demo")]
#[command(about = "Prim / Kruskal 最小生成树演示")]
struct Args {
    /// 使用的图
    #[arg(short, long, value_enum, default_value = "simple")]
    example: Example,

    /// 随机种子
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// 随机图的顶点数
    #[arg(short = 'n', long, default_value = "10")]
    vertices: usize,

    /// Prim 的起始顶点
    #[arg(long, default_value = "0")]
    start: u64,

    /// Kruskal 使用遍历而不是并查集做环检测
    #[arg(long)]
    traversal: bool,

    /// 以 JSON 输出步骤
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let graph = match args.example {
        Example::Simple => simple_example(&mut rng)?,
        Example::Random => random_connected(&mut rng, args.vertices, args.vertices, 10)?,
    };

    let cycle_check = if args.traversal {
        CycleCheck::Traversal
    } else {
        CycleCheck::UnionFind
    };
    let config = MstConfig::default().with_cycle_check(cycle_check);

    let prim = Prim::with_config(&graph, VertexId::new(args.start), config.clone())?;
    let kruskal = Kruskal::with_config(&graph, config)?;

    if args.json {
        let output = serde_json::json!({
            "prim": prim.steps().collect::<Vec<_>>(),
            "kruskal": kruskal.steps().collect::<Vec<_>>(),
            "prim_tree": prim.run(),
            "kruskal_tree": kruskal.run(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("SpanGraph 演示");
    println!("==============");
    println!("顶点数: {}  边数: {}", graph.vertex_count(), graph.edge_count());
    println!("邻接表:");
    print!("{}", graph.adjacency_lists());
    println!();

    println!("Prim（起点 {}）:", args.start);
    print_steps(&prim.steps().collect::<Vec<_>>());
    print_tree(&graph, &prim.run());

    println!("Kruskal:");
    print_steps(&kruskal.steps().collect::<Vec<_>>());
    print_tree(&graph, &kruskal.run());

    Ok(())
}

fn print_steps(steps: &[MstStep]) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(row!["#", "边", "端点", "权重", "处理", "累计代价"]);
    for (i, step) in steps.iter().enumerate() {
        table.add_row(row![
            i + 1,
            step.edge,
            format!("({}, {})", step.vtx1, step.vtx2),
            step.weight,
            step.disposition,
            step.total_cost
        ]);
    }
    table.printstd();
}

fn print_tree(graph: &Graph, tree: &SpanningTree) {
    let edges: Vec<String> = tree
        .edges()
        .iter()
        .filter_map(|&id| graph.edge(id))
        .map(|e| format!("({}, {})", e.vtx1(), e.vtx2()))
        .collect();
    println!("生成树的边: {}", edges.join(" "));
    match tree.require_spanning() {
        Ok(_) => println!("使用 {} 的最小代价: {}\n", tree.algorithm(), tree.total_cost()),
        Err(e) => println!("{}，部分代价: {}\n", e, tree.total_cost()),
    }
}

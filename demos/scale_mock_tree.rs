use uiscale::{NodeDef, ScalerOpts, SizePolicy, TreeScaler, UiTree};

fn mock_tree() -> NodeDef {
    NodeDef::new("root")
        .with_position(0.0, 0.0)
        .with_size(1920.0, 1080.0)
        .with_child(
            NodeDef::new("header")
                .with_position(0.0, 0.0)
                .with_size(1920.0, 100.0)
                .with_child(
                    NodeDef::new("title")
                        .with_position(50.0, 25.0)
                        .with_size(500.0, 50.0)
                        .with_font_size(32.0)
                        .with_line_height(40.0),
                ),
        )
        .with_child(
            NodeDef::new("content")
                .with_position(0.0, 100.0)
                .with_size(1920.0, 880.0),
        )
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut tree = UiTree::from_def(&mock_tree())?;
    println!("original UI tree:\n{}", tree.to_json_string(true)?);

    let mut scaler = TreeScaler::new(0.5);
    scaler.scale(&mut tree);
    println!("\ndirect x0.5:\n{}", tree.to_json_string(true)?);

    let mut tree = UiTree::from_def(&mock_tree())?;
    TreeScaler::with_opts(0.5, ScalerOpts::relative(SizePolicy::Relative)).scale(&mut tree);
    println!("\nrelative x0.5:\n{}", tree.to_json_string(true)?);
    Ok(())
}

use boolfn::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut functions = FunctionSet::default();
    for text in ["A AND B", "A XOR B", "(A IMP B) EQV (C NOR A)", "A ∧ (B ∨ ¬C)"] {
        match validate(text) {
            (true, _) => {
                functions.add_expression(text)?;
            }
            (false, message) => println!("Rejected '{}': {:?}", text, message),
        }
    }

    for f in &functions {
        println!("{}", f);
        println!("  variables:  {:?}", f.variables());
        println!("  simplified: {}", f.simplify());
        println!("  zhegalkin:  {}", f.to_zhegalkin()?);
        println!("  minimized:  {}", f.minimize()?);
        println!("  symbolic:   {}", SYMBOLIC_FMT_CFG.infix(f.ast()));
        println!("  properties: {:?}", f.properties()?);

        if let Some(first) = f.variables().first() {
            let (low, high) = f.decompose(first)?;
            println!("  {}=0: {}    {}=1: {}", first, low, first, high);
        }
    }

    let cover = QuineMcCluskey::new(4).with_dont_cares([0, 15]).minimize(&[6, 7]);
    println!("Cover of m(6,7) + d(0,15): {}", cover);

    println!("{}", functions.to_json()?);
    Ok(())
}

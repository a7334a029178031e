/// Example expanding a few Hall symbols into their operations
///
/// Shows strict parsing, the partial results kept for a bad symbol and the
/// SHELX LATT shortcut.
use hall_symmetry::{HallInfo, HallSymbol, LatticeType, OperationList};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Expanding Hall symbols ===\n");

    for text in ["P 2", "-P 1", "P 61", "-P 2ac 2n", "-F 4 2 3"] {
        let symbol = HallSymbol::parse(text)?;
        let operations = symbol.operations();
        println!(
            "{:<12} {:<16} {} terms, {} operations",
            text,
            symbol.lattice().designation(),
            symbol.rotation_count(),
            operations.len()
        );
        println!("   primitive: {}", symbol.primitive_symbol());
    }

    println!("\nOperations of P 61:");
    for op in HallSymbol::parse("P 61")?.operations().iter() {
        print!("{}", op);
        println!();
    }

    println!("A symbol that fails on its second term:");
    let info = HallInfo::new("P 2 5");
    if let Some(err) = info.error() {
        println!("   error: {}", err);
    }
    let mut operations = OperationList::with_identity();
    info.generate_operations(&mut operations);
    println!(
        "   kept {} term(s), {} operations",
        info.rotation_count(),
        operations.len()
    );

    println!("\nSHELX LATT values:");
    for latt in [1, -2, 4, -7] {
        if let Some(symbol) = LatticeType::hall_equivalent(latt) {
            println!("   LATT {:>2} -> {}", latt, symbol);
        }
    }

    Ok(())
}

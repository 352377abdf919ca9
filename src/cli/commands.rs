use crate::graph::{Hub, IngredientNetwork, IngredientStats, NetworkSummary, Pairing, PathOutcome};
use crate::Result;
use std::io::{BufRead, Write};

const MENU: &str = "\
Choose an option:
  1) Related ingredients
  2) Shortest path between two ingredients
  3) Most connected ingredient
  4) Stats for an ingredient
  0) Quit
";

/// Print the strongest pairings for an ingredient
pub fn related(network: &IngredientNetwork, ingredient: &str, limit: usize) {
    println!("{}", format_related(&network.query().related(ingredient, limit)));
}

/// Print the shortest path between two ingredients
pub fn path(network: &IngredientNetwork, from: &str, to: &str) {
    println!("{}", format_path(&network.query().shortest_path(from, to)));
}

/// Print the most connected ingredient
pub fn most_connected(network: &IngredientNetwork) {
    println!("{}", format_hub(network.query().most_connected().ok().as_ref()));
}

/// Print statistics for an ingredient
pub fn stats(network: &IngredientNetwork, ingredient: &str) {
    println!("{}", format_stats(network.query().stats(ingredient).as_ref()));
}

/// Print graph size and build parameters
pub fn summary(network: &IngredientNetwork) {
    println!("{}", format_summary(&network.summary()));
}

/// Interactive menu loop. Ends on `0` or end of input.
pub fn explore<R: BufRead, W: Write>(
    network: &IngredientNetwork,
    top_n: usize,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "{}\n", format_summary(&network.summary()))?;

    loop {
        write!(output, "{MENU}")?;
        let Some(choice) = prompt(&mut input, &mut output, "Your choice: ")? else {
            break;
        };

        let text = match choice.as_str() {
            "1" => {
                let Some(ingredient) = prompt(&mut input, &mut output, "Ingredient: ")? else {
                    break;
                };
                format_related(&network.query().related(&ingredient, top_n))
            }
            "2" => {
                let Some(from) = prompt(&mut input, &mut output, "From ingredient: ")? else {
                    break;
                };
                let Some(to) = prompt(&mut input, &mut output, "To ingredient: ")? else {
                    break;
                };
                format_path(&network.query().shortest_path(&from, &to))
            }
            "3" => format_hub(network.query().most_connected().ok().as_ref()),
            "4" => {
                let Some(ingredient) = prompt(&mut input, &mut output, "Ingredient: ")? else {
                    break;
                };
                format_stats(network.query().stats(&ingredient).as_ref())
            }
            "0" => break,
            _ => "Invalid choice.".to_string(),
        };

        writeln!(output, "{text}\n")?;
    }

    output.flush()?;
    Ok(())
}

/// Write a prompt and read one trimmed line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

// Formatting helpers

pub fn format_related(pairings: &[Pairing]) -> String {
    if pairings.is_empty() {
        return "No related ingredients found".to_string();
    }

    pairings
        .iter()
        .map(|p| format!("  {}  (co-occurs {}×)", p.name, p.weight))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_path(outcome: &PathOutcome) -> String {
    match outcome {
        PathOutcome::Found(path) => format!("Path: {}", path.join(" -> ")),
        PathOutcome::NoPath => "No connection.".to_string(),
        PathOutcome::UnknownIngredient => "Unknown ingredient.".to_string(),
    }
}

pub fn format_hub(hub: Option<&Hub>) -> String {
    match hub {
        Some(hub) => format!("Most connected: {} (degree {})", hub.ingredient, hub.degree),
        None => "Graph is empty.".to_string(),
    }
}

pub fn format_stats(stats: Option<&IngredientStats>) -> String {
    let Some(stats) = stats else {
        return "Not found".to_string();
    };

    let mut text = format!(
        "Ingredient: {}\n  Recipes containing: {}\n  Degree: {}",
        stats.ingredient, stats.recipes_containing, stats.degree
    );
    if !stats.top_pairings.is_empty() {
        text.push_str("\n  Top pairings:");
        for p in &stats.top_pairings {
            text.push_str(&format!("\n    {} ({})", p.name, p.weight));
        }
    }
    text
}

pub fn format_summary(summary: &NetworkSummary) -> String {
    format!(
        "Graph ready: {} ingredients, {} edges ({} recipes, min co-occurrence {})",
        summary.ingredients, summary.edges, summary.recipes, summary.min_cooccurrence
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Normalizer;

    fn network() -> IngredientNetwork {
        IngredientNetwork::build(
            vec![
                vec!["Salt", "Pepper", "Onion"],
                vec!["Salt", "Pepper"],
                vec!["Onion", "Garlic"],
            ],
            Normalizer::default(),
            2,
        )
    }

    fn run_explore(script: &str) -> String {
        let mut output = Vec::new();
        explore(&network(), 10, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_format_related() {
        let pairings = vec![Pairing {
            name: "pepper".to_string(),
            weight: 2,
        }];
        assert_eq!(format_related(&pairings), "  pepper  (co-occurs 2×)");
        assert_eq!(format_related(&[]), "No related ingredients found");
    }

    #[test]
    fn test_format_path() {
        let found = PathOutcome::Found(vec!["salt".into(), "pepper".into()]);
        assert_eq!(format_path(&found), "Path: salt -> pepper");
        assert_eq!(format_path(&PathOutcome::NoPath), "No connection.");
        assert_eq!(
            format_path(&PathOutcome::UnknownIngredient),
            "Unknown ingredient."
        );
    }

    #[test]
    fn test_format_stats() {
        let net = network();
        let text = format_stats(net.query().stats("salt").as_ref());
        assert!(text.contains("Ingredient: salt"));
        assert!(text.contains("Recipes containing: 2"));
        assert!(text.contains("pepper (2)"));

        assert_eq!(format_stats(None), "Not found");
    }

    #[test]
    fn test_explore_session() {
        let output = run_explore("1\nsalt\n2\nonion\ngarlic\n3\n4\nsaffron\n9\n0\n");

        assert!(output.starts_with("Graph ready: 4 ingredients, 1 edges"));
        assert!(output.contains("pepper  (co-occurs 2×)"));
        assert!(output.contains("No connection."));
        assert!(output.contains("Most connected: pepper (degree 1)"));
        assert!(output.contains("Not found"));
        assert!(output.contains("Invalid choice."));
    }

    #[test]
    fn test_explore_stops_at_end_of_input() {
        let output = run_explore("1\n");
        assert!(output.ends_with("Ingredient: "));
    }
}

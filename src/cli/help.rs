use crate::terminal::{box_bottom, box_line, box_opt, box_top};

pub fn print_help() {
    box_top("Masspass");
    box_line("Mass generator of unique passwords for security testing");
    box_line("");
    box_line("USAGE:");
    box_line("  masspass -c <N> -o <FILE> [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_opt("  -c, --count <N>", "How many passwords to generate (required)");
    box_opt("  -o, --output <FILE>", "Output file; .txt is appended if missing (required)");
    box_opt("  -l, --length <N>", "Fixed length for all passwords");
    box_opt("      --min <N>", "Minimum length (default: 6)");
    box_opt("      --max <N>", "Maximum length (default: 12)");
    box_opt("  -p, --pattern <STR>", "Generate from a template instead of at random");
    box_opt("      --seed <N>", "Seed the generator for reproducible output");
    box_opt("  -y, --yes", "Skip the confirmation for very large counts");
    box_opt("      --save", "Store the effective --min/--max as defaults");
    box_opt("  -q, --quiet", "Only print errors");
    box_opt("  -h, --help", "Show this help");
    box_opt("  -v, --version", "Show version");
    box_line("");
    box_line("PATTERN TOKENS:");
    box_opt("  {n}", "Sequence number (0, 1, 2, ...)");
    box_opt("  {a}", "Random letter");
    box_opt("  {d}", "Random digit");
    box_opt("  {s}", "Random symbol");
    box_line("  Each token kind is drawn once per password and reused for");
    box_line("  every occurrence. Results outside --min/--max are dropped.");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  masspass -c 1000000 -o passwords.txt");
    box_line("  masspass -c 500000 -l 8 -o pass8char.txt");
    box_line("  masspass -c 10000 -p 'user{n}{d}{s}' --max 16 -o users");
    box_bottom();
}

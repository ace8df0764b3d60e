// Runs programs under both strategies and checks they are indistinguishable.
use tape_bf::{Interpreter, RunError, Strategy};

struct Outcome {
    error: Option<String>,
    output: Vec<u8>,
    cells: Vec<u8>,
    position: usize,
}

fn run(code: &str, input: &[u8], strategy: Strategy) -> Outcome {
    let mut bf = Interpreter::new(code, input, Vec::new());
    bf.set_strategy(strategy);
    let result: Result<(), RunError> = bf.run();
    let cells = bf.tape().cells().to_vec();
    let position = bf.tape().position();
    Outcome {
        error: result.err().map(|e| e.to_string()),
        output: bf.into_output(),
        cells,
        position,
    }
}

fn assert_equivalent(code: &str, input: &[u8]) {
    let naive = run(code, input, Strategy::Naive);
    let rle = run(code, input, Strategy::RunLength);
    assert_eq!(naive.error, rle.error, "error differs for {code:?}");
    assert_eq!(naive.output, rle.output, "output differs for {code:?}");
    assert_eq!(naive.cells, rle.cells, "tape differs for {code:?}");
    if naive.error.is_none() {
        assert_eq!(naive.position, rle.position, "pointer differs for {code:?}");
    }
}

#[test]
fn curated_programs_are_equivalent() {
    let programs = [
        "+++.",
        "+[-]",
        "<",
        "[",
        "+]",
        "+[>",
        ",.",
        ">>>+<<<.",
        "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.>.",
        ",+[-.,+]",
        "+++[>+++++[>+++<-]<-]>>.",
        ">>>+++<<<<",
        ">>>+++<<<+<",
        "-----------------------------------------------------------------------------------------------------------------------------------------------------------------------------------------------------------------------------------------------------------------------------.",
        "+ + + comments in between break runs <",
        "[<<<<<<+++---]>[.]+.",
    ];
    for code in programs {
        assert_equivalent(code, b"some input");
    }
}

/// Small deterministic generator so failures are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next() as usize) % items.len()]
    }
}

#[test]
fn generated_programs_are_equivalent() {
    // Every fragment terminates: loops either clear, transfer or walk towards cell 0.
    let fragments = [
        "+", "-", "<", ">", ".", ",", "+++", "----", "<<", "<<<", ">>", "[-]", "[>+<-]", "[<]", "[.-]",
        "x", "\n",
    ];
    let mut rng = Lcg(0x5eed);
    for _ in 0..500 {
        let len = 1 + (rng.next() % 40) as usize;
        let code: String = (0..len).map(|_| rng.pick(&fragments)).collect();
        assert_equivalent(&code, b"\x01\x02\xff\x00abc");
    }
}

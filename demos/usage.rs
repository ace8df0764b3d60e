use tape_bf::{Interpreter, Strategy};

fn main() {
    // Classic Brainfuck "Hello World!" program
    let code = "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.>.";

    let mut bf = Interpreter::new(code, std::io::stdin().lock(), Vec::new());
    bf.set_strategy(Strategy::Naive);

    if let Err(err) = bf.run() {
        eprintln!("Brainfuck interpreter error: {err}");
        std::process::exit(1);
    }

    print!("{}", String::from_utf8_lossy(bf.output()));
    println!("tape: {:?} (pointer at {})", bf.tape().cells(), bf.tape().position());
}

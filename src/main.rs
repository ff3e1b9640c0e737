use std::{
    fs,
    io::{BufRead, Write},
    path::Path,
};

use clap::Parser;
use gaby::{interpreter::evaluator::core::Context, parse};

const GABY_EXTENSION: &str = ".gaby";

/// gaby is an interpreter for the Gaby programming language, a scripting
/// language with Spanish keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run; must end in `.gaby`. Without it, the interactive
    /// prompt starts.
    script: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut context = Context::new();

    match args.script {
        Some(script) => run_file(&script, &mut context),
        None => repl(&mut context),
    }
}

/// Executes a script file. Any failure, from a bad extension to a runtime
/// error, ends the process with exit code 1.
fn run_file(filename: &str, context: &mut Context) {
    if !filename.ends_with(GABY_EXTENSION) {
        eprintln!("Error: El archivo debe tener extensión {GABY_EXTENSION}");
        std::process::exit(1);
    }

    let source = fs::read_to_string(filename).unwrap_or_else(|error| {
                     eprintln!("Error al leer el archivo: {error}");
                     std::process::exit(1);
                 });

    // Relative paths inside the script resolve against its directory.
    if let Ok(absolute) = Path::new(filename).canonicalize()
       && let Some(directory) = absolute.parent()
    {
        let _ = std::env::set_current_dir(directory);
    }

    let program = match parse(&source) {
        Ok(program) => program,
        Err(errors) => {
            print_parse_errors(&errors);
            std::process::exit(1);
        },
    };

    if let Err(error) = context.eval_program(&program) {
        println!("ERROR: {error}");
        std::process::exit(1);
    }
}

/// The read-evaluate-print loop.
///
/// A line is held open with a `.. ` continuation prompt while more `{` than
/// `}` have been seen. `salir()` and `ayuda()` are intercepted here and never
/// reach the evaluator.
fn repl(context: &mut Context) {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "amigo".to_string());
    println!("¡Hola {user}! Bienvenido al intérprete de Gaby.");
    println!("Escribe 'salir()' para salir, 'ayuda()' para ver comandos disponibles.");

    let stdin = std::io::stdin();
    let mut scanner = LineScanner::new(stdin.lock());

    loop {
        print!(">> ");
        let _ = std::io::stdout().flush();

        let Some((mut line, mut more)) = scanner.scan() else {
            println!("¡Hasta luego!");
            return;
        };

        while more {
            print!(".. ");
            let _ = std::io::stdout().flush();
            let Some((next, still_open)) = scanner.scan() else {
                break;
            };
            line.push('\n');
            line.push_str(&next);
            more = still_open;
        }

        if line == "salir()" {
            println!("¡Hasta luego!");
            return;
        }
        if line == "ayuda()" {
            print_help();
            continue;
        }

        match parse(&line) {
            Ok(program) => match context.eval_program(&program) {
                Ok(value) => {
                    if !value.is_null() {
                        println!("{value}");
                    }
                },
                Err(error) => println!("ERROR: {error}"),
            },
            Err(errors) => print_parse_errors(&errors),
        }
    }
}

fn print_parse_errors(errors: &[gaby::error::ParseError]) {
    println!("¡Ops! Encontré algunos errores:");
    for error in errors {
        println!("\t- {error}");
    }
}

fn print_help() {
    println!("{}",
             r#"
Comandos disponibles:
  salir()   - Salir del intérprete
  ayuda()   - Mostrar esta ayuda

Ejemplos básicos:
  mostrar("¡Hola mundo!")
  resultado := 5 + 3
  mostrar(resultado)

  // Condicionales
  guarda edad = 25
  si (edad > 17) {
    mostrar("Mayor de edad")
  } sino {
    mostrar("Menor de edad")
  }

  // Bucles
  para (guarda i = 1; i < 6; i += 1) {
    mostrar(i)
  }

  contador := 0
  mientras (contador < 5) {
    mostrar(contador)
    contador += 1
  }

  // Funciones
  fun saludar(nombre) {
    devolver "¡Hola, " + nombre + "!"
  }
  mostrar(saludar("Gaby"))

  // Clases
  clase Persona {
    crear(nombre, edad) {
      esto.nombre = nombre
      esto.edad = edad
    }

    fun presentarse() {
      mostrar("Me llamo " + esto.nombre + " y tengo " + texto(esto.edad) + " años")
    }
  }

  p := nuevo Persona("Juan", 30)
  p.presentarse()
"#)
}

/// Reads lines and tracks brace balance so blocks can span several prompts.
///
/// The count is character-level and persists across lines; it never goes
/// below zero.
struct LineScanner<R> {
    reader:        R,
    brackets_open: usize,
}

impl<R: BufRead> LineScanner<R> {
    const fn new(reader: R) -> Self {
        Self { reader,
               brackets_open: 0 }
    }

    /// Reads one line, returning it without its line break together with
    /// whether more input is needed to balance the braces so far. `None`
    /// means the input ended.
    fn scan(&mut self) -> Option<(String, bool)> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).ok()?;
        if read == 0 {
            return None;
        }

        let line = line.trim_end_matches(['\n', '\r']).to_string();
        for byte in line.bytes() {
            match byte {
                b'{' => self.brackets_open += 1,
                b'}' => self.brackets_open = self.brackets_open.saturating_sub(1),
                _ => {},
            }
        }

        Some((line, self.brackets_open > 0))
    }
}

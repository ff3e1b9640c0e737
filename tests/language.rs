use std::fs;

use gaby::{
    interpreter::{evaluator::core::Context, value::core::Value},
    run_source,
};
use walkdir::WalkDir;

fn eval(source: &str) -> Value {
    let mut context = Context::new();
    run_source(source, &mut context)
        .unwrap_or_else(|e| panic!("Script failed: {e}\nSource:\n{source}"))
}

fn eval_error(source: &str) -> String {
    let mut context = Context::new();
    match run_source(source, &mut context) {
        Ok(value) => panic!("Script produced {value} but was expected to fail:\n{source}"),
        Err(error) => error.to_string(),
    }
}

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "gaby")
                                      })
    {
        count += 1;
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut context = Context::new();
        if let Err(e) = run_source(&source, &mut context) {
            panic!("Demo {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(eval("guarda x = 2 + 3 * 4\nx"), Value::Integer(14));
    assert_eq!(eval("(2 + 3) * 4"), Value::Integer(20));
    assert_eq!(eval("10 / 3"), Value::Integer(3));
    assert_eq!(eval("10 % 3"), Value::Integer(1));
    assert_eq!(eval("2 ^ 10"), Value::Integer(1024));
    assert_eq!(eval("-5 + 3"), Value::Integer(-2));
}

#[test]
fn integer_arithmetic_wraps() {
    assert_eq!(eval("9223372036854775807 + 1"), Value::Integer(i64::MIN));
    assert_eq!(eval("-9223372036854775807 - 2"), Value::Integer(i64::MAX));
    // A negative exponent multiplies zero times.
    assert_eq!(eval("2 ^ -3"), Value::Integer(1));
}

#[test]
fn zero_divisors_are_errors() {
    assert_eq!(eval_error("1 / 0"), "división por cero");
    assert_eq!(eval_error("5 % 0"), "módulo por cero");
    assert_eq!(eval_error("1.5 / 0.0"), "división por cero");
    assert_eq!(eval_error("1.5 % 0.5"), "módulo por cero");
}

#[test]
fn numeric_promotion_and_float_quirks() {
    assert_eq!(eval("1 + 2.5"), Value::Float(3.5));
    assert_eq!(eval("10 / 4.0"), Value::Float(2.5));
    // Decimal modulo truncates both operands first: 7 % 3.
    assert_eq!(eval("7.9 % 3.2"), Value::Float(1.0));
    assert_eq!(eval("2.0 ^ 3"), Value::Float(8.0));
}

#[test]
fn string_concatenation_and_length() {
    assert_eq!(eval("\"hola\" + \" \" + \"mundo\""), Value::from("hola mundo"));
    assert_eq!(eval("\"hola\".longitud"), Value::Integer(4));
    // Byte length, not character count.
    assert_eq!(eval("'adiós'.longitud"), Value::Integer(6));
    assert_eq!(eval("\"abc\" == \"abc\""), Value::Boolean(true));
}

#[test]
fn truthiness_in_conditions() {
    assert_eq!(eval("si (0) { 1 } sino { 2 }"), Value::Integer(2));
    assert_eq!(eval("si (\"\") { 1 } sino { 2 }"), Value::Integer(2));
    assert_eq!(eval("si (nulo) { 1 } sino { 2 }"), Value::Integer(2));
    assert_eq!(eval("si (3.5) { 1 } sino { 2 }"), Value::Integer(1));
    assert_eq!(eval("si (falso) { 1 }"), Value::Null);
}

#[test]
fn bang_negates_literally() {
    assert_eq!(eval("!verdad"), Value::Boolean(false));
    assert_eq!(eval("!falso"), Value::Boolean(true));
    assert_eq!(eval("!nulo"), Value::Boolean(true));
    // Everything that is not falso or nulo negates to falso, zero included.
    assert_eq!(eval("!0"), Value::Boolean(false));
    assert_eq!(eval("!5"), Value::Boolean(false));
}

#[test]
fn logical_words_short_circuit() {
    assert_eq!(eval("verdad o (1 / 0)"), Value::Boolean(true));
    assert_eq!(eval("falso y (1 / 0)"), Value::Boolean(false));
    // The last evaluated operand comes back, not a coerced boolean.
    assert_eq!(eval("1 y 2"), Value::Integer(2));
    assert_eq!(eval("nulo o 5"), Value::Integer(5));
    assert_eq!(eval("falso o 0"), Value::Integer(0));
}

#[test]
fn equality_falls_back_to_identity() {
    assert_eq!(eval("1 == \"1\""), Value::Boolean(false));
    assert_eq!(eval("verdad != 1"), Value::Boolean(true));
    assert_eq!(eval("nulo == nulo"), Value::Boolean(true));
    assert_eq!(eval("[1] == [1]"), Value::Boolean(false));
    assert_eq!(eval("guarda a = [1]\na == a"), Value::Boolean(true));
}

#[test]
fn closures_capture_their_scope() {
    let fib = "guarda f = fun(n) { si (n < 2) { devolver n } devolver f(n-1) + f(n-2) }\n\
               f(10)";
    assert_eq!(eval(fib), Value::Integer(55));

    // Mutations in the enclosing scope stay visible inside the closure.
    let capture = "guarda x = 1\n\
                   guarda f = fun() { devolver x }\n\
                   x = 2\n\
                   f()";
    assert_eq!(eval(capture), Value::Integer(2));
}

#[test]
fn named_function_statement_is_reusable() {
    assert_eq!(eval("fun doble(x) { devolver x * 2 }\ndoble(21)"), Value::Integer(42));
}

#[test]
fn call_argument_binding() {
    // Missing arguments bind to nulo, extra ones are dropped.
    assert_eq!(eval("guarda f = fun(a, b) { devolver b }\nf(1)"), Value::Null);
    assert_eq!(eval("guarda f = fun(a, b) { devolver b }\nf(1, 2, 3)"), Value::Integer(2));
}

#[test]
fn while_loops_share_their_scope() {
    let sum = "guarda total = 0\n\
               guarda i = 1\n\
               mientras (i < 6) { total += i\n i += 1 }\n\
               total";
    assert_eq!(eval(sum), Value::Integer(15));

    let early = "guarda f = fun() { mientras (verdad) { devolver 3 } }\nf()";
    assert_eq!(eval(early), Value::Integer(3));
}

#[test]
fn for_loops_get_their_own_scope() {
    // The loop's value is its last body value.
    assert_eq!(eval("para (guarda i = 0; i < 5; i = i + 1) { i }"), Value::Integer(4));

    // Assignment writes the loop scope, shadowing the outer binding.
    let shadowed = "guarda x = 0\n\
                    para (guarda i = 0; i < 3; i = i + 1) { x = x + 1 }\n\
                    x";
    assert_eq!(eval(shadowed), Value::Integer(0));

    // Empty sections loop forever; devolver is the way out.
    assert_eq!(eval("guarda f = fun() { para (;;) { devolver 7 } }\nf()"), Value::Integer(7));
}

#[test]
fn array_indexing() {
    assert_eq!(eval("[10, 20, 30][1]"), Value::Integer(20));
    assert_eq!(eval("[1, 2, 3][5]"), Value::Null);
    assert_eq!(eval("[1, 2, 3][-1]"), Value::Null);
    assert_eq!(eval("[1, 2, 3].longitud"), Value::Integer(3));
}

#[test]
fn hash_literals_and_lookups() {
    assert_eq!(eval("{\"a\": 1, 2: \"dos\", verdad: 3}[\"a\"]"), Value::Integer(1));
    assert_eq!(eval("{\"a\": 1, 2: \"dos\"}[2]"), Value::from("dos"));
    assert_eq!(eval("{verdad: 3}[verdad]"), Value::Integer(3));
    assert_eq!(eval("{\"a\": 1}[\"nadie\"]"), Value::Null);

    assert_eq!(eval_error("{[1]: 2}"), "clave no utilizable como hash: LISTA");
    assert_eq!(eval_error("{\"a\": 1}[[1]]"), "clave no utilizable como hash: LISTA");
}

#[test]
fn conversion_and_math_builtins() {
    assert_eq!(eval("texto(42)"), Value::from("42"));
    assert_eq!(eval("num(\"7\")"), Value::Integer(7));
    assert_eq!(eval("num(\"3.5\")"), Value::Float(3.5));
    assert_eq!(eval("abs(-5)"), Value::Integer(5));
    assert_eq!(eval("redondear(3.7)"), Value::Float(4.0));
    assert_eq!(eval("piso(3.7)"), Value::Float(3.0));
    assert_eq!(eval("techo(3.2)"), Value::Float(4.0));
    // Whole results collapse back to integers.
    assert_eq!(eval("potencia(2, 10)"), Value::Integer(1024));
    assert_eq!(eval("raiz(9)"), Value::Float(3.0));
    assert_eq!(eval_error("raiz(-1)"), "no se puede calcular la raíz de un número negativo");
}

#[test]
fn string_builtins() {
    assert_eq!(eval("mayusculas(\"hola\")"), Value::from("HOLA"));
    assert_eq!(eval("minusculas(\"HOLA\")"), Value::from("hola"));
    assert_eq!(eval("recortar(\"  x  \")"), Value::from("x"));
    assert_eq!(eval("contiene(\"hola\", \"ol\")"), Value::Boolean(true));
    assert_eq!(eval("reemplazar(\"a-b-c\", \"-\", \".\")"), Value::from("a.b.c"));
    assert_eq!(eval("dividir(\"a,b,c\", \",\").longitud"), Value::Integer(3));
    assert_eq!(eval("dividir(\"abc\", \"\")[1]"), Value::from("b"));
}

#[test]
fn collection_builtins_copy_on_write() {
    assert_eq!(eval("longitud([1, 2, 3])"), Value::Integer(3));
    assert_eq!(eval("longitud(\"hola\")"), Value::Integer(4));
    assert_eq!(eval("longitud({\"a\": 1})"), Value::Integer(1));

    let untouched = "guarda a = [1]\n\
                     guarda b = agregar(a, 2)\n\
                     a.longitud";
    assert_eq!(eval(untouched), Value::Integer(1));
    assert_eq!(eval("agregar([1], 2)[1]"), Value::Integer(2));

    assert_eq!(eval("eliminar([1, 2, 3], 1)[1]"), Value::Integer(3));
    assert_eq!(eval_error("eliminar([1], 5)"), "índice fuera de rango");

    assert_eq!(eval("rango(1, 5).longitud"), Value::Integer(5));
    assert_eq!(eval("rango(1, 5)[4]"), Value::Integer(5));
    assert_eq!(eval_error("rango(5, 1)"), "el inicio no puede ser mayor que el fin");
}

#[test]
fn runtime_error_messages() {
    assert_eq!(eval_error("desconocido"), "identificador no encontrado: desconocido");
    assert_eq!(eval_error("5()"), "no es una función: ENTERO");
    assert_eq!(eval_error("verdad + falso"), "operador desconocido: BOOLEANO + BOOLEANO");
    assert_eq!(eval_error("1 + \"a\""), "tipo de operando no válido: ENTERO + TEXTO");
    assert_eq!(eval_error("\"a\" - \"b\""), "operador desconocido: TEXTO - TEXTO");
    assert_eq!(eval_error("-verdad"), "operador de prefijo desconocido: -BOOLEANO");
    assert_eq!(eval_error("nuevo 5"), "no es una clase: ENTERO");
    assert_eq!(eval_error("5[0]"), "operador de índice no soportado: ENTERO");
    // A dot right after a digit would lex into the number, so use a name.
    assert_eq!(eval_error("guarda n = 5\nn.campo"),
               "acceso a propiedad no soportado para: ENTERO");
    assert_eq!(eval_error("\"a\".campo"), "propiedad no encontrada en string: campo");
    assert_eq!(eval_error("[1].campo"), "propiedad no encontrada en array: campo");
    assert_eq!(eval_error("longitud(1, 2)"),
               "número incorrecto de argumentos: se esperaba 1, se obtuvo 2");
    assert_eq!(eval_error("raiz(1, 2, 3)"),
               "número incorrecto de argumentos: se esperaba 1 o 2, se obtuvo 3");
    assert_eq!(eval_error("abs(\"x\")"), "argumento no válido para 'abs': TEXTO");
}

#[test]
fn classes_with_constructor_and_methods() {
    let source = "clase C { num v\n\
                  crear(x) { esto.v = x }\n\
                  fun doble() { devolver esto.v * 2 } }\n\
                  guarda c = nuevo C(21)\n\
                  c.doble()";
    assert_eq!(eval(source), Value::Integer(42));
}

#[test]
fn class_property_defaults() {
    // The argument list of nuevo may be omitted entirely.
    let source = "clase P { guarda n = 5 }\n\
                  guarda p = nuevo P\n\
                  p.n";
    assert_eq!(eval(source), Value::Integer(5));

    // Defaults copy shallowly; each instance gets its own slot.
    let per_instance = "clase P { guarda n = 1 }\n\
                        guarda a = nuevo P\n\
                        guarda b = nuevo P\n\
                        a.n = 9\n\
                        b.n";
    assert_eq!(eval(per_instance), Value::Integer(1));
}

#[test]
fn methods_bind_their_receiver() {
    let detached = "clase C { crear(v) { esto.v = v }\n\
                    fun obtener() { devolver esto.v } }\n\
                    guarda c = nuevo C(9)\n\
                    guarda m = c.obtener\n\
                    m()";
    assert_eq!(eval(detached), Value::Integer(9));

    let per_instance = "clase C { crear(v) { esto.v = v }\n\
                        fun obtener() { devolver esto.v } }\n\
                        guarda a = nuevo C(1)\n\
                        guarda b = nuevo C(2)\n\
                        a.obtener() + b.obtener()";
    assert_eq!(eval(per_instance), Value::Integer(3));

    // esto exists only during the call.
    let leaked = "clase C { fun m() { devolver 1 } }\n\
                  guarda c = nuevo C\n\
                  c.m()\n\
                  esto";
    assert_eq!(eval_error(leaked), "identificador no encontrado: esto");
}

#[test]
fn instance_properties_mutate() {
    let source = "clase Caja { crear(v) { esto.v = v }\n\
                  fun subir() { esto.v += 1 } }\n\
                  guarda caja = nuevo Caja(40)\n\
                  caja.subir()\n\
                  caja.subir()\n\
                  caja.v";
    assert_eq!(eval(source), Value::Integer(42));
}

#[test]
fn parent_classes_resolve_but_do_not_chain() {
    let not_inherited = "clase A { fun saluda() { devolver 1 } }\n\
                         clase B extiende A { }\n\
                         guarda b = nuevo B\n\
                         b.saluda()";
    assert_eq!(eval_error(not_inherited), "propiedad o método no encontrado: saluda");

    assert_eq!(eval_error("clase B extiende Zeta { }"), "identificador no encontrado: Zeta");
    assert_eq!(eval_error("guarda X = 1\nclase B extiende X { }"), "no es una clase: ENTERO");
}

#[test]
fn declaration_and_assignment_forms() {
    assert_eq!(eval("x := 5\nx"), Value::Integer(5));
    assert_eq!(eval("guarda a = 1\nguarda b = 2\na = b = 7\na"), Value::Integer(7));
    assert_eq!(eval_error("1 = 2"), "objetivo de asignación no válido");
}

#[test]
fn compound_assignment_forms() {
    assert_eq!(eval("guarda n = 10\nn += 5\nn"), Value::Integer(15));
    assert_eq!(eval("guarda n = 10\nn -= 3\nn"), Value::Integer(7));
    assert_eq!(eval("guarda n = 10\nn *= 2\nn"), Value::Integer(20));
    assert_eq!(eval("guarda n = 10\nn /= 4\nn"), Value::Integer(2));
    assert_eq!(eval("guarda n = 10\nn %= 3\nn"), Value::Integer(1));
    assert_eq!(eval("guarda n = 10\nn ^= 2\nn"), Value::Integer(100));
    // The read walks the chain like any other use of the name.
    assert_eq!(eval_error("sin_declarar += 1"), "identificador no encontrado: sin_declarar");
}

#[test]
fn top_level_return_stops_the_program() {
    assert_eq!(eval("devolver 5\n99"), Value::Integer(5));
    assert_eq!(eval("devolver;\n99"), Value::Null);
}

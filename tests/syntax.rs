use gaby::{
    interpreter::lexer::{Lexer, Token, TokenKind},
    parse,
};

fn tokens(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut all = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        all.push(token);
        if done {
            break;
        }
    }
    all
}

fn single_kind(source: &str) -> TokenKind {
    let mut lexer = Lexer::new(source);
    lexer.next_token().kind
}

#[test]
fn every_keyword_lexes_to_its_kind() {
    let table = [("fun", TokenKind::Function),
                 ("clase", TokenKind::Class),
                 ("proto", TokenKind::Proto),
                 ("si", TokenKind::If),
                 ("sino", TokenKind::Else),
                 ("cuando", TokenKind::When),
                 ("devolver", TokenKind::Return),
                 ("verdad", TokenKind::True),
                 ("falso", TokenKind::False),
                 ("nulo", TokenKind::Null),
                 ("mientras", TokenKind::While),
                 ("para", TokenKind::For),
                 ("repetir", TokenKind::Repeat),
                 ("haz", TokenKind::Do),
                 ("romper", TokenKind::Break),
                 ("continuar", TokenKind::Continue),
                 ("evaluar", TokenKind::Switch),
                 ("caso", TokenKind::Case),
                 ("defecto", TokenKind::Default),
                 ("en", TokenKind::In),
                 ("desde", TokenKind::From),
                 ("hasta", TokenKind::To),
                 ("y", TokenKind::And),
                 ("o", TokenKind::Or),
                 ("no", TokenKind::Not),
                 ("es", TokenKind::Is),
                 ("no_es", TokenKind::IsNot),
                 ("nuevo", TokenKind::New),
                 ("extiende", TokenKind::Extends),
                 ("implementa", TokenKind::Implements),
                 ("guarda", TokenKind::Var),
                 ("publico", TokenKind::Public),
                 ("privado", TokenKind::Private),
                 ("protegido", TokenKind::Protected),
                 ("estatico", TokenKind::Static),
                 ("final", TokenKind::Final),
                 ("esto", TokenKind::This),
                 ("super", TokenKind::Super),
                 ("intentar", TokenKind::Try),
                 ("atrapar", TokenKind::Catch),
                 ("finalmente", TokenKind::Finally),
                 ("lanzar", TokenKind::Throw)];

    for (lexeme, kind) in table {
        assert_eq!(single_kind(lexeme), kind, "keyword {lexeme}");
    }
}

#[test]
fn every_operator_lexes_to_its_kind() {
    let table = [("=", TokenKind::Assign),
                 ("+", TokenKind::Plus),
                 ("-", TokenKind::Minus),
                 ("!", TokenKind::Bang),
                 ("*", TokenKind::Asterisk),
                 ("/", TokenKind::Slash),
                 ("%", TokenKind::Mod),
                 ("^", TokenKind::Power),
                 ("<", TokenKind::Lt),
                 (">", TokenKind::Gt),
                 ("==", TokenKind::Eq),
                 ("!=", TokenKind::NotEq),
                 ("+=", TokenKind::PlusAssign),
                 ("-=", TokenKind::MinusAssign),
                 ("*=", TokenKind::MulAssign),
                 ("/=", TokenKind::DivAssign),
                 ("%=", TokenKind::ModAssign),
                 ("^=", TokenKind::PowAssign),
                 (":=", TokenKind::Declare),
                 (",", TokenKind::Comma),
                 (";", TokenKind::Semicolon),
                 (":", TokenKind::Colon),
                 (".", TokenKind::Dot),
                 ("(", TokenKind::LParen),
                 (")", TokenKind::RParen),
                 ("{", TokenKind::LBrace),
                 ("}", TokenKind::RBrace),
                 ("[", TokenKind::LBracket),
                 ("]", TokenKind::RBracket)];

    for (lexeme, kind) in table {
        assert_eq!(single_kind(lexeme), kind, "operator {lexeme}");
    }
}

#[test]
fn identifiers_accept_unicode_letters() {
    let all = tokens("año _interno x1");
    assert_eq!(all[0].kind, TokenKind::Ident);
    assert_eq!(all[0].literal, "año");
    assert_eq!(all[1].literal, "_interno");
    assert_eq!(all[2].literal, "x1");
}

#[test]
fn numbers_take_at_most_one_dot() {
    let all = tokens("1.2.3");
    assert_eq!(all[0].literal, "1.2");
    assert_eq!(all[0].kind, TokenKind::Num);
    assert_eq!(all[1].kind, TokenKind::Dot);
    assert_eq!(all[2].literal, "3");

    // A trailing dot still belongs to the number.
    let trailing = tokens("7.");
    assert_eq!(trailing[0].literal, "7.");
    assert_eq!(trailing[0].kind, TokenKind::Num);
}

#[test]
fn strings_keep_their_raw_bytes() {
    let double = tokens("\"hola\"");
    assert_eq!(double[0].kind, TokenKind::Str);
    assert_eq!(double[0].literal, "hola");

    let single = tokens("'adiós'");
    assert_eq!(single[0].literal, "adiós");

    // A backslash escapes the closing quote but stays in the lexeme.
    let escaped = tokens(r#""a\"b""#);
    assert_eq!(escaped[0].literal, "a\\\"b");

    // Unterminated strings run to the end of the input.
    let open = tokens("\"abc");
    assert_eq!(open[0].kind, TokenKind::Str);
    assert_eq!(open[0].literal, "abc");
    assert_eq!(open[1].kind, TokenKind::Eof);
}

#[test]
fn tokens_carry_line_and_column() {
    let all = tokens("guarda x\n  y");
    assert_eq!((all[0].line, all[0].column), (1, 1));
    assert_eq!((all[1].line, all[1].column), (1, 8));
    assert_eq!((all[2].line, all[2].column), (2, 3));
}

#[test]
fn comments_are_skipped_and_counted() {
    let all = tokens("1 // comentario\n+ 2");
    let kinds: Vec<TokenKind> = all.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Num, TokenKind::Plus, TokenKind::Num, TokenKind::Eof]);

    // Block comments advance the line counter.
    let after = tokens("/* a\nb */ x");
    assert_eq!(after[0].kind, TokenKind::Ident);
    assert_eq!(after[0].line, 2);

    // An unterminated block comment swallows the rest quietly.
    let open = tokens("1 /* sin cerrar");
    assert_eq!(open[1].kind, TokenKind::Eof);
}

#[test]
fn unknown_bytes_are_illegal_tokens() {
    let all = tokens("@");
    assert_eq!(all[0].kind, TokenKind::Illegal);
    assert_eq!(all[0].literal, "@");
}

#[test]
fn parse_errors_carry_position_and_block_evaluation() {
    let errors = parse("guarda = 1").unwrap_err();
    assert!(!errors.is_empty());
    assert_eq!(errors[0].to_string(),
               "línea 1, columna 8: se esperaba token IDENT, se obtuvo =");

    let errors = parse("guarda x 2").unwrap_err();
    assert_eq!(errors[0].to_string(),
               "línea 1, columna 10: se esperaba token =, se obtuvo NUM");

    let errors = parse("@").unwrap_err();
    assert_eq!(errors[0].to_string(),
               "línea 1, columna 1: no hay función de análisis de prefijo para ILLEGAL");
}

#[test]
fn oversized_integers_are_rejected() {
    let errors = parse("99999999999999999999").unwrap_err();
    assert_eq!(errors[0].to_string(),
               "línea 1, columna 1: no se pudo analizar \"99999999999999999999\" como entero");
}

fn reprint(source: &str) -> String {
    parse(source).unwrap_or_else(|errors| panic!("{source} failed to parse: {errors:?}"))
                 .to_string()
}

#[test]
fn pretty_printing_reparses_to_the_same_tree() {
    let sources = ["guarda x = 2 + 3 * 4",
                   "devolver f(1, 2)[0].campo",
                   "si (x < 3) { x } sino { devolver 0 }",
                   "mientras (x > 0) { x -= 1 }",
                   "para (guarda i = 0; i < 5; i = i + 1) { mostrar(i) }",
                   "para (;;) { 1 }",
                   "fun doble(x) { devolver x * 2 }",
                   "guarda f = fun(a, b) { a + b }",
                   "[1, 2.5, \"tres\", verdad, nulo]",
                   "{\"a\": 1, 2: [3]}",
                   "x := -y",
                   "a = b = c + 1",
                   "n ^= 2",
                   "clase Punto extiende Figura implementa Dibujable {\n\
                      guarda x = 0\n\
                      crear(x) { esto.x = x }\n\
                      fun mover(dx) { esto.x += dx }\n\
                    }",
                   "nuevo Punto(1).mover(2)"];

    for source in sources {
        let printed = reprint(source);
        assert_eq!(reprint(&printed), printed, "unstable pretty-print for {source}");
    }
}

#[test]
fn precedence_shapes() {
    assert_eq!(reprint("a + b * c"), "(a + (b * c));");
    assert_eq!(reprint("a * b + c"), "((a * b) + c);");
    assert_eq!(reprint("-a ^ 2"), "((-a) ^ 2);");
    assert_eq!(reprint("!x == falso"), "((!x) == falso);");
    assert_eq!(reprint("a == b y c == d"), "((a == b) y (c == d));");
    assert_eq!(reprint("a o b y c"), "((a o b) y c);");
    assert_eq!(reprint("x = 1 + 2"), "(x = (1 + 2));");
    assert_eq!(reprint("a.b(c)[0]"), "(a.b(c)[0]);");
}

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Expr, Fields, Lit, LitFloat, LitStr, parse_macro_input,
    spanned::Spanned,
};

/// Variant attribute: #[chance(<expr>)]
#[proc_macro_derive(LootSet, attributes(chance))]
pub fn derive_loot_set(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new(input.ident.span(), "LootSet can only be derived for enums")
            .to_compile_error()
            .into();
    };

    // Collect (name_literal, chance_expr) and the from_name match arms.
    let mut entries = Vec::new();
    let mut name_arms = Vec::new();

    for variant in &data_enum.variants {
        // Only fieldless enums are supported (loot tiers are usually C-like)
        match &variant.fields {
            Fields::Unit => {}
            _ => {
                return syn::Error::new(
                    variant.span(),
                    "LootSet only supports fieldless variants",
                )
                .to_compile_error()
                .into();
            }
        }

        // Find #[chance(...)]
        let mut chance_expr: Option<Expr> = None;
        for Attribute { meta, .. } in &variant.attrs {
            if meta.path().is_ident("chance") {
                match meta {
                    syn::Meta::List(list) => {
                        // Parse inside as an expression (e.g., 1.0/100.0 or 1/100)
                        let expr = syn::parse2::<Expr>(list.tokens.clone()).map_err(|e| {
                            syn::Error::new(list.span(), format!("invalid chance expr: {e}"))
                        });
                        match expr {
                            Ok(e) => chance_expr = Some(e),
                            Err(err) => return err.to_compile_error().into(),
                        }
                    }
                    _ => {
                        return syn::Error::new(meta.span(), "use #[chance(<expr>)]")
                            .to_compile_error()
                            .into();
                    }
                }
            }
        }
        let Some(expr) = chance_expr else {
            return syn::Error::new(variant.span(), "missing #[chance(...)] on variant")
                .to_compile_error()
                .into();
        };

        let ident = &variant.ident;
        let name = LitStr::new(&ident.to_string(), ident.span());

        // Upgrade integer literals to floats so 1/100 => 1.0/100.0
        let expr_f64 = to_f64_expr(expr);

        entries.push(quote! { (#name, (#expr_f64)) });
        name_arms.push(quote! { #name => ::core::option::Option::Some(Self::#ident), });
    }

    // Generate const LOOT plus inherent plan builders and from_name as sugar.
    let expanded = quote! {
        impl lootplan::LootSet for #enum_ident {
            const LOOT: &'static [(&'static str, f64)] = &[
                #(#entries),*
            ];
        }

        impl #enum_ident {
            /// Build a single-draw lootplan populated with the annotated chances.
            pub fn single_lootplan() -> lootplan::SingleLootplan {
                <Self as lootplan::LootSet>::single_lootplan()
            }

            /// Build a batch-draw lootplan populated with the annotated chances.
            pub fn multi_lootplan() -> lootplan::MultiLootplan {
                <Self as lootplan::LootSet>::multi_lootplan()
            }

            /// The variant whose name matches a drawn entry, if any.
            pub fn from_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    #(#name_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    expanded.into()
}

/// Recursively rewrite integer literals to floating-point (e.g., 1 -> 1.0),
/// so that expressions like `1/100` use FP division.
fn to_f64_expr(mut e: Expr) -> Expr {
    match e {
        Expr::Lit(ref mut el) => {
            if let Lit::Int(int) = &el.lit {
                // 1 -> 1.0 (preserve span)
                let s = format!("{}{}", int.base10_digits(), ".0");
                el.lit = Lit::Float(LitFloat::new(&s, int.span()));
            }
            e
        }
        Expr::Binary(mut b) => {
            b.left = Box::new(to_f64_expr(*b.left));
            b.right = Box::new(to_f64_expr(*b.right));
            Expr::Binary(b)
        }
        Expr::Paren(mut p) => {
            p.expr = Box::new(to_f64_expr(*p.expr));
            Expr::Paren(p)
        }
        Expr::Unary(mut u) => {
            u.expr = Box::new(to_f64_expr(*u.expr));
            Expr::Unary(u)
        }
        Expr::Group(mut g) => {
            g.expr = Box::new(to_f64_expr(*g.expr));
            Expr::Group(g)
        }
        _ => e,
    }
}

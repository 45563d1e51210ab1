use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Attribute, Ident, LitByteStr, Result, Token, Type, Visibility, braced, parenthesized,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
};

/// How a vtable slot is exposed
#[derive(Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Typed function pointer plus an inherent forwarding helper
    Method,
    /// Occupies the slot but is never called through this mirror
    Reserved,
}

/// A single function: a vtable method or an imported symbol
struct Function {
    attrs: Vec<Attribute>,
    name: Ident,
    args: Vec<(Ident, Type)>,
    ret: Type,
    slot: Slot,
}

/// `fn name(arg: Type, ...) [-> Ret] [=> reserved];`
fn parse_function(input: ParseStream) -> Result<Function> {
    let attrs = input.call(Attribute::parse_outer)?;
    input.parse::<Token![fn]>()?;
    let name: Ident = input.parse()?;

    let args_content;
    parenthesized!(args_content in input);
    let args_parsed: Punctuated<(Ident, Type), Token![,]> = args_content.parse_terminated(
        |input| {
            let name: Ident = input.parse()?;
            input.parse::<Token![:]>()?;
            let ty: Type = input.parse()?;
            Ok((name, ty))
        },
        Token![,],
    )?;
    let args: Vec<_> = args_parsed.into_iter().collect();

    let ret: Type = if input.peek(Token![->]) {
        input.parse::<Token![->]>()?;
        input.parse()?
    } else {
        syn::parse_quote!(())
    };

    let slot = if input.peek(Token![=>]) {
        input.parse::<Token![=>]>()?;
        let handler: Ident = input.parse()?;
        match handler.to_string().as_str() {
            "reserved" => Slot::Reserved,
            other => {
                return Err(syn::Error::new(
                    handler.span(),
                    format!("unknown slot handler: {}", other),
                ));
            }
        }
    } else {
        Slot::Method
    };

    input.parse::<Token![;]>()?;

    Ok(Function {
        attrs,
        name,
        args,
        ret,
        slot,
    })
}

/// The full com_interface input
struct ComInterface {
    attrs: Vec<Attribute>,
    name: Ident,
    base: Option<Ident>,
    methods: Vec<Function>,
}

impl Parse for ComInterface {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;

        // IName [: IBase]
        let name: Ident = input.parse()?;
        let base = if input.peek(Token![:]) {
            input.parse::<Token![:]>()?;
            Some(input.parse()?)
        } else {
            None
        };

        let content;
        braced!(content in input);

        let mut methods = Vec::new();
        while !content.is_empty() {
            methods.push(parse_function(&content)?);
        }

        Ok(ComInterface {
            attrs,
            name,
            base,
            methods,
        })
    }
}

fn generate_vtable_field(interface: &Ident, method: &Function) -> TokenStream2 {
    let name = &method.name;
    match method.slot {
        Slot::Reserved => quote! {
            pub #name: Option<unsafe extern "system" fn()>
        },
        Slot::Method => {
            let ret = &method.ret;
            let arg_types: Vec<_> = method.args.iter().map(|(_, ty)| ty).collect();
            quote! {
                pub #name: unsafe extern "system" fn(*mut #interface, #(#arg_types),*) -> #ret
            }
        }
    }
}

fn generate_helper(method: &Function) -> Option<TokenStream2> {
    if method.slot == Slot::Reserved {
        return None;
    }
    let name = &method.name;
    let attrs = &method.attrs;
    let ret = &method.ret;
    let arg_names: Vec<_> = method.args.iter().map(|(name, _)| name).collect();
    let arg_types: Vec<_> = method.args.iter().map(|(_, ty)| ty).collect();

    Some(quote! {
        #(#attrs)*
        #[inline]
        pub unsafe fn #name(this: *mut Self #(, #arg_names: #arg_types)*) -> #ret {
            unsafe { ((*(*this).vtable).#name)(this #(, #arg_names)*) }
        }
    })
}

/// Declares a `#[repr(C)]` mirror of a COM-style interface.
///
/// Produces the interface struct (a single vtable pointer), its vtable with
/// the base interface's vtable embedded first, and an inherent `unsafe fn`
/// per callable slot that dispatches through the vtable.
#[proc_macro]
pub fn com_interface(input: TokenStream) -> TokenStream {
    let interface = parse_macro_input!(input as ComInterface);

    let attrs = &interface.attrs;
    let name = &interface.name;
    let vtable_type = format_ident!("{}Vtbl", name);

    let base_field = interface.base.as_ref().map(|base| {
        let base_vtable = format_ident!("{}Vtbl", base);
        quote! { pub base: #base_vtable, }
    });

    let fields: Vec<_> = interface
        .methods
        .iter()
        .map(|m| generate_vtable_field(name, m))
        .collect();

    let helpers: Vec<_> = interface
        .methods
        .iter()
        .filter_map(generate_helper)
        .collect();

    let vtable_doc = format!("Virtual function table of [`{}`].", name);

    let expanded = quote! {
        #(#attrs)*
        #[repr(C)]
        pub struct #name {
            pub vtable: *const #vtable_type,
        }

        #[doc = #vtable_doc]
        #[repr(C)]
        pub struct #vtable_type {
            #base_field
            #(#fields),*
        }

        impl #name {
            #(#helpers)*
        }
    };

    TokenStream::from(expanded)
}

/// The full import_table input
struct ImportTable {
    attrs: Vec<Attribute>,
    vis: Visibility,
    name: Ident,
    imports: Vec<Function>,
}

impl Parse for ImportTable {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let name: Ident = input.parse()?;

        let content;
        braced!(content in input);

        let mut imports = Vec::new();
        while !content.is_empty() {
            let function = parse_function(&content)?;
            if function.slot == Slot::Reserved {
                return Err(syn::Error::new(
                    function.name.span(),
                    "imports cannot be reserved",
                ));
            }
            imports.push(function);
        }

        Ok(ImportTable {
            attrs,
            vis,
            name,
            imports,
        })
    }
}

/// Declares a table of C functions resolved from a `libloading::Library`.
///
/// The generated struct keeps the library alive for as long as the copied
/// function pointers are reachable. `from_library` fails with
/// `SlangcError::SymbolNotFound` on the first missing export.
#[proc_macro]
pub fn import_table(input: TokenStream) -> TokenStream {
    let table = parse_macro_input!(input as ImportTable);

    let attrs = &table.attrs;
    let vis = &table.vis;
    let name = &table.name;

    let fn_types: Vec<_> = table
        .imports
        .iter()
        .map(|import| {
            let ret = &import.ret;
            let arg_types: Vec<_> = import.args.iter().map(|(_, ty)| ty).collect();
            quote! { unsafe extern "C" fn(#(#arg_types),*) -> #ret }
        })
        .collect();

    let field_names: Vec<_> = table.imports.iter().map(|i| &i.name).collect();
    let field_attrs: Vec<_> = table.imports.iter().map(|i| &i.attrs).collect();
    let symbol_names: Vec<_> = table.imports.iter().map(|i| i.name.to_string()).collect();
    let symbol_bytes: Vec<_> = table
        .imports
        .iter()
        .map(|i| {
            let mut bytes = i.name.to_string().into_bytes();
            bytes.push(0);
            LitByteStr::new(&bytes, i.name.span())
        })
        .collect();

    let expanded = quote! {
        #(#attrs)*
        #vis struct #name {
            _library: ::libloading::Library,
            #(
                #(#field_attrs)*
                pub #field_names: #fn_types,
            )*
        }

        impl #name {
            /// Every symbol this table resolves, in declaration order.
            pub const SYMBOLS: &'static [&'static str] = &[#(#symbol_names),*];

            /// Resolves every symbol from `library` and takes ownership of it.
            ///
            /// # Safety
            /// The library must export each symbol with the declared signature.
            pub unsafe fn from_library(library: ::libloading::Library) -> crate::Result<Self> {
                #(
                    let #field_names = unsafe {
                        *library
                            .get::<#fn_types>(#symbol_bytes)
                            .map_err(|source| crate::SlangcError::SymbolNotFound {
                                name: #symbol_names,
                                source,
                            })?
                    };
                )*
                Ok(#name {
                    _library: library,
                    #(#field_names),*
                })
            }
        }

        impl ::std::fmt::Debug for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!(#name))
                    .field("library", &self._library)
                    .field("symbols", &Self::SYMBOLS.len())
                    .finish()
            }
        }
    };

    TokenStream::from(expanded)
}

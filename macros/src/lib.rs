use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model from a struct declaring its three components.
///
/// The struct gets an `alpha` field appended, all fields are made public and
/// the common constructors and accessors are implemented.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let (field_names, field_types): (Vec<_>, Vec<_>) = input
        .fields
        .iter()
        .map(|f| (f.ident.clone(), f.ty.clone()))
        .unzip();
    debug_assert!(field_names.len() == 3);

    let (field1, field2, field3) = (&field_names[0], &field_names[1], &field_names[2]);
    let (type1, type2, type3) = (&field_types[0], &field_types[1], &field_types[2]);

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    match input.fields {
        syn::Fields::Named(ref mut named) => {
            named.named.push(
                syn::Field::parse_named
                    .parse2(syn::parse_quote! {
                        /// The alpha component of the color, in the range [0, 1].
                        pub alpha: crate::color::Component
                    })
                    .unwrap(),
            );
        }
        _ => {
            return quote! {
                compile_error!("Models must use named fields.")
            }
            .into();
        }
    }

    let struct_name = input.ident.clone();

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new color from its components and an alpha value.
            pub fn new(
                #field1: #type1,
                #field2: #type2,
                #field3: #type3,
                alpha: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    alpha,
                }
            }

            /// Create a new fully opaque color.
            pub fn opaque(#field1: #type1, #field2: #type2, #field3: #type3) -> Self {
                Self::new(#field1, #field2, #field3, 1.0)
            }

            /// Return the three components of the color, without alpha.
            pub fn components(&self) -> (#type1, #type2, #type3) {
                (self.#field1, self.#field2, self.#field3)
            }

            /// Return a copy of this color with the alpha component replaced.
            pub fn with_alpha(self, alpha: crate::color::Component) -> Self {
                Self { alpha, ..self }
            }
        }

        impl From<(#type1, #type2, #type3, crate::color::Component)> for #struct_name {
            fn from(value: (#type1, #type2, #type3, crate::color::Component)) -> Self {
                Self::new(value.0, value.1, value.2, value.3)
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
